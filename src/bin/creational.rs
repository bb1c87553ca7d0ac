// Walks through the four creational patterns.
//
// Usage: creational [CONFIG.toml]

use colored::Colorize;
use creational_patterns::factory::without_factory;
use creational_patterns::{
    get_prototype_of, logging, ButtonFactory, DemoConfig, Panini, PaniniBuilder, Platform,
    PlatformButton, ProtoObject, Result, Settings, Step, Value, FROZEN_SETTINGS,
};
use std::process::ExitCode;
use std::rc::Rc;

fn section(title: &str) {
    println!("\n{}", format!("=== {} ===", title).bold().cyan());
}

fn singleton_demo() {
    section("Singleton Pattern");
    let settings = Settings::instance();
    println!("Settings: {:?}", settings);
    println!("  mode: {}", settings.mode());

    let again = Settings::instance();
    println!("  Same instance: {}", std::ptr::eq(settings, again));
    println!("  Constructions: {}", Settings::construction_count());
    println!("  Frozen static: {:?}", FROZEN_SETTINGS);
}

fn prototype_demo(config: &DemoConfig) -> Result<()> {
    section("Prototype Pattern");
    let zombie = ProtoObject::root()
        .with_method("eatBrain", |_| Value::from("gnam gnam 🧠"))
        .into_shared();
    let orc = ProtoObject::create(Rc::clone(&zombie), [("name", config.own_name.as_str())]);

    // Inherited operations don't show up here but can still be called.
    println!("orc: {:?}", orc);
    println!(
        "orc method: {}",
        orc.call_with_limit("eatBrain", config.max_delegate_depth)?
    );

    let is_zombie = get_prototype_of(&orc).is_some_and(|p| Rc::ptr_eq(p, &zombie));
    println!("  prototype of orc is zombie: {}", is_zombie);

    match orc.call("fly") {
        Ok(v) => println!("  orc flies: {}", v),
        Err(e) => println!("  {}", e.to_string().yellow()),
    }
    Ok(())
}

fn builder_demo() {
    section("Builder Pattern");
    let telescoped = Panini::from_parts("wheat", true, true);
    println!("All at once: {}", telescoped);

    let mut my_lunch = Panini::new("gluten free");
    println!("Started:     {}", my_lunch);
    my_lunch.add_bun().add_meat().add_souce();
    println!("Chained:     {}", my_lunch);

    let folded = PaniniBuilder::new("rye").steps([Step::Souce, Step::Meat]).build();
    println!("Folded:      {}", folded);
}

fn factory_demo(config: &DemoConfig) {
    section("Factory Pattern");
    let os = config.platform.as_str();

    println!("Without factory:");
    let button1 = without_factory(os);
    let button2 = without_factory(os);
    println!("  {}", button1.render());
    println!("  {}", button2.render());

    println!("With factory:");
    let factory = ButtonFactory::new();
    let btn1 = factory.create_button(os);
    let btn2 = factory.create_button(os);
    println!("  {}", btn1.render());
    println!("  {}", btn2.render());
    println!("  Distinct instances: {}", btn1.id() != btn2.id());

    let enum_button = PlatformButton::new(Platform::from_discriminant(os));
    println!("Enum-based factory: {}", enum_button.render());
}

fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    logging::init(&config.log_level);

    println!("{}", "Creational Patterns".bold());
    println!("===================");

    singleton_demo();
    prototype_demo(&config)?;
    builder_demo();
    factory_demo(&config);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
