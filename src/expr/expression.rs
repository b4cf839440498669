use std::fmt;
use std::sync::Arc;

use super::atomic::AtomicExpr;

/// A candidate pattern: an ordered sequence of atomic fragments.
///
/// Expressions are immutable value types. Every operator returns a new
/// expression; the atom sequence is reference-counted so clones inside the
/// evolution loop stay cheap. Two expressions are equal iff their atom
/// sequences are equal element-wise.
#[derive(Debug, Clone)]
pub struct Expr {
    atoms: Arc<[AtomicExpr]>,
}

impl Expr {
    pub fn empty() -> Self {
        Self {
            atoms: Vec::new().into(),
        }
    }

    /// Single-atom expression from one token.
    pub fn atom(token: impl Into<String>) -> Self {
        Self {
            atoms: vec![AtomicExpr::new(token)].into(),
        }
    }

    pub fn from_atoms(atoms: Vec<AtomicExpr>) -> Self {
        Self { atoms: atoms.into() }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[AtomicExpr] {
        &self.atoms
    }

    /// First `n` atoms, clamped to the expression length.
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.len());
        Self { atoms: self.atoms[..n].to_vec().into() }
    }

    /// Last `n` atoms, clamped to the expression length.
    pub fn tail(&self, n: usize) -> Self {
        let n = n.min(self.len());
        Self { atoms: self.atoms[self.len() - n..].to_vec().into() }
    }

    /// Raw atom-sequence concatenation. Distinct from [`Expr::sequence`],
    /// which wraps the operands in parentheses.
    pub fn concat(&self, other: &Expr) -> Self {
        let mut atoms = self.atoms.to_vec();
        atoms.extend_from_slice(&other.atoms);
        Self { atoms: atoms.into() }
    }

    /// Concatenation operator: `(ab)`.
    pub fn sequence(&self, other: &Expr) -> Self {
        let mut atoms = Vec::with_capacity(self.len() + other.len() + 2);
        atoms.push(AtomicExpr::new("("));
        atoms.extend_from_slice(&self.atoms);
        atoms.extend_from_slice(&other.atoms);
        atoms.push(AtomicExpr::new(")"));
        Self { atoms: atoms.into() }
    }

    /// Alternation operator: `(a|b)`.
    pub fn alternate(&self, other: &Expr) -> Self {
        let mut atoms = Vec::with_capacity(self.len() + other.len() + 3);
        atoms.push(AtomicExpr::new("("));
        atoms.extend_from_slice(&self.atoms);
        atoms.push(AtomicExpr::new("|"));
        atoms.extend_from_slice(&other.atoms);
        atoms.push(AtomicExpr::new(")"));
        Self { atoms: atoms.into() }
    }

    /// Zero-or-more closure: `(a)*`.
    pub fn closure(&self) -> Self {
        self.wrap_postfix("*")
    }

    /// One-or-more closure: `(a)+`.
    pub fn closure_plus(&self) -> Self {
        self.wrap_postfix("+")
    }

    fn wrap_postfix(&self, op: &str) -> Self {
        let mut atoms = Vec::with_capacity(self.len() + 3);
        atoms.push(AtomicExpr::new("("));
        atoms.extend_from_slice(&self.atoms);
        atoms.push(AtomicExpr::new(")"));
        atoms.push(AtomicExpr::new(op));
        Self { atoms: atoms.into() }
    }

    /// Rendered pattern text: the atoms' tokens joined in order.
    pub fn pattern(&self) -> String {
        self.atoms.iter().map(AtomicExpr::as_str).collect()
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.atoms == other.atoms
    }
}

impl Eq for Expr {}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in self.atoms.iter() {
            f.write_str(atom.as_str())?;
        }
        Ok(())
    }
}
