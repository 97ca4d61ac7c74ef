/// Dense index of an interned vertex. Symbols are handed out
/// in first-appearance order, starting at zero.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Sym(u32);

impl std::hash::Hash for Sym {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl std::fmt::Debug for Sym {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<u32> for Sym {
    fn eq(&self, other: &u32) -> bool {
        self.0.eq(other)
    }
}

impl std::ops::AddAssign<u32> for Sym {
    fn add_assign(&mut self, rhs: u32) {
        self.0 += rhs;
    }
}

impl Sym {
    #[inline(always)]
    pub const fn new(v: u32) -> Self {
        Sym(v)
    }
    #[inline(always)]
    pub const fn into_usize(self) -> usize {
        self.0 as usize
    }
    /// Every symbol below `n`, in enumeration order.
    #[inline]
    pub fn range(n: usize) -> impl Iterator<Item = Sym> + Clone {
        (0..n as u32).map(Sym::new)
    }
}
