use crate::Probability;

/// generalization of any probability distribution over
/// a finite, ordered action set.
pub trait Density {
    type S;

    fn density(&self, x: &Self::S) -> Probability;
    fn support(&self) -> impl Iterator<Item = Self::S>;
}
