use crate::core::data::colour::Colour;

pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    /// Whether `value` belongs to the uniform region the boundary tracer may
    /// flood fill with [`ColourMap::fill_colour`].
    fn is_fill_value(&self, value: &T) -> bool;

    fn fill_colour(&self) -> Colour;
}
