mod builder;
mod cook;

pub use builder::*;
pub use cook::*;

/// A pizza described by its dough, sauce and topping. Every field keeps
/// the last value written to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, getset::Getters, getset::Setters)]
#[getset(get = "pub", set = "pub")]
pub struct Pizza {
    dough: String,
    sauce: String,
    topping: String,
}

impl std::fmt::Display for Pizza {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Pizza with Dough: {}, Sauce: {}, Topping: {}",
            self.dough, self.sauce, self.topping
        )
    }
}
