/// Something that can produce copies of itself.
///
/// The two methods differ only for data held behind shared handles (`Rc`, `Arc`):
/// a shallow copy shares it with the original, a deep copy duplicates it. Scalars and
/// exclusively owned data are copied by value either way.
pub trait Prototype: Sized {
    fn shallow_copy(&self) -> Self;

    fn deep_copy(&self) -> Self;
}
