use simplelog::*;
use workbench::computer::{ComputerAssembler, DesktopComputerBuilder, LaptopComputerBuilder};
use workbench::pizza::{
    Cook, HawaiianPizzaBuilder, MilkowskyPizzaBuilder, PizzaBuilder, SpicyPizzaBuilder,
};

fn main() {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
    .unwrap();

    let assembler = ComputerAssembler;
    let mut desktop_builder = DesktopComputerBuilder::new();
    let desktop = assembler.assemble_computer(&mut desktop_builder);
    let mut laptop_builder = LaptopComputerBuilder::new();
    let laptop = assembler.assemble_laptop(&mut laptop_builder);
    println!("{desktop}");
    println!();
    println!("{laptop}");
    println!();

    let cook = Cook;
    let mut hawaiian_builder = HawaiianPizzaBuilder::new();
    cook.make_pizza(&mut hawaiian_builder);
    println!("{}", hawaiian_builder.pizza());

    let mut spicy_builder = SpicyPizzaBuilder::new();
    cook.make_pizza(&mut spicy_builder);
    println!("{}", spicy_builder.pizza());

    let mut milkowsky_builder = MilkowskyPizzaBuilder::new();
    cook.make_pizza(&mut milkowsky_builder);
    println!("{}", milkowsky_builder.pizza());
}
