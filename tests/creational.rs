use creational_patterns::{
    get_prototype_of, ButtonFactory, Panini, PaniniBuilder, PatternError, Platform, ProtoObject,
    Settings, Step, Value,
};
use proptest::prelude::*;
use std::rc::Rc;
use std::sync::Barrier;
use std::thread;

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Bun), Just(Step::Meat), Just(Step::Souce)]
}

#[test]
fn singleton_survives_racing_first_access() {
    let barrier = &Barrier::new(8);
    let addresses: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(move || {
                    barrier.wait();
                    Settings::instance() as *const Settings as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addresses.iter().all(|&a| a == addresses[0]));
    assert_eq!(Settings::construction_count(), 1);
}

#[test]
fn prototype_zombie_and_orc() {
    let zombie = ProtoObject::root()
        .with_method("eatBrain", |_| Value::from("gnam gnam 🧠"))
        .into_shared();
    let orc = ProtoObject::create(Rc::clone(&zombie), [("name", "Gallan")]);

    assert_eq!(orc.field("name").unwrap().as_str(), Some("Gallan"));
    assert_eq!(orc.call("eatBrain").unwrap(), Value::from("gnam gnam 🧠"));
    assert!(Rc::ptr_eq(get_prototype_of(&orc).unwrap(), &zombie));
    assert!(matches!(
        orc.call("roar"),
        Err(PatternError::PropertyNotFound { .. })
    ));
}

#[test]
fn prototype_lookup_reaches_grandparent() {
    let zombie = ProtoObject::root()
        .with_method("eatBrain", |_| Value::from("gnam gnam 🧠"))
        .into_shared();
    let orc = ProtoObject::create(zombie, [("name", "Gallan")]);
    let warlord = ProtoObject::create(Rc::clone(&orc), [("rank", "chief")]);

    assert_eq!(warlord.call("eatBrain").unwrap(), Value::from("gnam gnam 🧠"));
    assert_eq!(warlord.field("name").unwrap().as_str(), Some("Gallan"));
    assert!(Rc::ptr_eq(get_prototype_of(&warlord).unwrap(), &orc));
    assert!(matches!(
        warlord.call_with_limit("eatBrain", 1),
        Err(PatternError::DelegateChainTooDeep { limit: 1, .. })
    ));
}

proptest! {
    #[test]
    fn any_order_of_all_steps_gives_full_panini(order in Just(vec![Step::Bun, Step::Meat, Step::Souce]).prop_shuffle()) {
        let mut lunch = Panini::new("gluten free");
        for step in order {
            lunch.apply(step);
        }

        prop_assert_eq!(lunch.bun(), "wheat");
        prop_assert_eq!(lunch.meat(), Some(true));
        prop_assert_eq!(lunch.souce(), Some(true));
    }

    #[test]
    fn chained_and_folded_builders_agree(steps in prop::collection::vec(step_strategy(), 0..12)) {
        let mut chained = Panini::new("gluten free");
        for step in &steps {
            chained.apply(*step);
        }
        let folded = PaniniBuilder::new("gluten free").steps(steps.clone()).build();

        prop_assert_eq!(&chained, &folded);
        prop_assert_eq!(chained.has_meat(), steps.contains(&Step::Meat));
        prop_assert_eq!(chained.has_souce(), steps.contains(&Step::Souce));
    }

    #[test]
    fn repeating_a_step_changes_nothing(steps in prop::collection::vec(step_strategy(), 1..8)) {
        let mut once = Panini::new("rye");
        let mut twice = Panini::new("rye");
        for step in &steps {
            once.apply(*step);
            twice.apply(*step).apply(*step);
        }
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn factory_is_total(os in ".*") {
        let button = ButtonFactory::new().create_button(&os);
        let expected = if os == "ios" { Platform::Ios } else { Platform::Android };
        prop_assert_eq!(button.platform(), expected);
    }
}

#[test]
fn factory_builds_fresh_instances() {
    let factory = ButtonFactory::new();
    let ids: Vec<u64> = (0..5).map(|_| factory.create_button("android").id()).collect();
    let mut unique = ids.clone();
    unique.dedup();
    assert_eq!(ids, unique);
}
