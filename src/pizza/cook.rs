use super::PizzaBuilder;

/// Runs the fixed dough, sauce, topping sequence against any
/// [`PizzaBuilder`]. The finished pizza stays with the builder.
pub struct Cook;

impl Cook {
    pub fn make_pizza<B: PizzaBuilder>(&self, builder: &mut B) {
        log::info!("Making pizza");
        builder.build_dough();
        builder.build_sauce();
        builder.build_topping();
    }
}
