mod selection;
mod selector;

pub use selection::Selection;
pub use selector::AtomSelector;
