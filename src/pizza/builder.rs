use super::Pizza;

/// Stepwise construction of a [`Pizza`]. Unlike [`ComputerBuilder`], the
/// steps take no values; each variant brings its own recipe.
///
/// [`ComputerBuilder`]: crate::computer::ComputerBuilder
pub trait PizzaBuilder {
    fn build_dough(&mut self);
    fn build_sauce(&mut self);
    fn build_topping(&mut self);
    /// Copy of the pizza built so far.
    fn pizza(&self) -> Pizza;
}

#[derive(Default)]
pub struct HawaiianPizzaBuilder {
    pizza: Pizza,
}

impl HawaiianPizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PizzaBuilder for HawaiianPizzaBuilder {
    fn build_dough(&mut self) {
        self.pizza.set_dough("Pan Dough".into());
    }

    fn build_sauce(&mut self) {
        self.pizza.set_sauce("Hawaiian Sauce".into());
    }

    fn build_topping(&mut self) {
        self.pizza.set_topping("Ham and Pineapple".into());
    }

    fn pizza(&self) -> Pizza {
        self.pizza.clone()
    }
}

#[derive(Default)]
pub struct SpicyPizzaBuilder {
    pizza: Pizza,
}

impl SpicyPizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PizzaBuilder for SpicyPizzaBuilder {
    fn build_dough(&mut self) {
        self.pizza.set_dough("Thin Dough".into());
    }

    fn build_sauce(&mut self) {
        self.pizza.set_sauce("Spicy Tomato Sauce".into());
    }

    fn build_topping(&mut self) {
        self.pizza.set_topping("Pepperoni and Jalapenos".into());
    }

    fn pizza(&self) -> Pizza {
        self.pizza.clone()
    }
}

#[derive(Default)]
pub struct MilkowskyPizzaBuilder {
    pizza: Pizza,
}

impl MilkowskyPizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PizzaBuilder for MilkowskyPizzaBuilder {
    fn build_dough(&mut self) {
        self.pizza.set_dough("Thin Dough".into());
    }

    fn build_sauce(&mut self) {
        self.pizza.set_sauce("Tomato Sauce".into());
    }

    fn build_topping(&mut self) {
        self.pizza.set_topping("Cheese".into());
    }

    fn pizza(&self) -> Pizza {
        self.pizza.clone()
    }
}
