use super::*;

#[derive(Debug)]
struct Stub(usize);

impl CarouselInstance for Stub {
    fn item_count(&self) -> usize {
        self.0
    }
}

fn build(count: usize) -> impl FnOnce() -> Result<Stub, CarouselError> {
    move || Ok(Stub(count))
}

// =============================================================
// init
// =============================================================

#[test]
fn init_creates_once_per_container() {
    let mut registry = Registry::new();
    assert!(matches!(registry.init("hero", 4, build(4)), Ok(InitOutcome::Created)));
    assert!(matches!(registry.init("hero", 4, build(4)), Ok(InitOutcome::AlreadyBound)));
    assert_eq!(registry.len(), 1);
}

#[test]
fn second_init_does_not_call_builder() {
    let mut registry = Registry::new();
    assert!(registry.init("hero", 4, build(4)).is_ok());
    let outcome = registry.init("hero", 4, || Err(CarouselError::Dom("must not run".into())));
    assert!(matches!(outcome, Ok(InitOutcome::AlreadyBound)));
}

#[test]
fn empty_container_or_no_items_is_skipped() {
    let mut registry: Registry<Stub> = Registry::new();
    assert!(matches!(registry.init("", 4, build(4)), Ok(InitOutcome::Skipped)));
    assert!(matches!(registry.init("hero", 0, build(0)), Ok(InitOutcome::Skipped)));
    assert!(registry.is_empty());
}

#[test]
fn get_mut_reaches_the_bound_instance_only() {
    let mut registry = Registry::new();
    assert!(registry.init("hero", 4, build(4)).is_ok());
    assert!(registry.init("row", 2, build(2)).is_ok());
    let Some(hero) = registry.get_mut("hero") else {
        panic!("hero is bound");
    };
    hero.0 = 6;
    assert_eq!(registry.get("hero").map(CarouselInstance::item_count), Some(6));
    assert_eq!(registry.get("row").map(CarouselInstance::item_count), Some(2));
    assert!(registry.get_mut("missing").is_none());
}

#[test]
fn failed_build_registers_nothing() {
    let mut registry: Registry<Stub> = Registry::new();
    let outcome = registry.init("hero", 4, || Err(CarouselError::Dom("no container".into())));
    assert!(matches!(outcome, Err(CarouselError::Dom(_))));
    assert!(registry.get("hero").is_none());
}

// =============================================================
// sync_items / teardown
// =============================================================

#[test]
fn sync_with_same_count_keeps_instance() {
    let mut registry = Registry::new();
    assert!(registry.init("row", 5, build(5)).is_ok());
    assert!(matches!(registry.sync_items("row", 5, build(5)), Ok(InitOutcome::AlreadyBound)));
}

#[test]
fn sync_with_new_count_rebuilds() {
    let mut registry = Registry::new();
    assert!(registry.init("row", 5, build(5)).is_ok());
    assert!(matches!(registry.sync_items("row", 7, build(7)), Ok(InitOutcome::Rebuilt)));
    assert_eq!(registry.get("row").map(CarouselInstance::item_count), Some(7));
}

#[test]
fn sync_to_zero_removes() {
    let mut registry = Registry::new();
    assert!(registry.init("row", 5, build(5)).is_ok());
    assert!(matches!(registry.sync_items("row", 0, build(0)), Ok(InitOutcome::Removed)));
    assert!(registry.is_empty());
}

#[test]
fn sync_unknown_container_initializes() {
    let mut registry = Registry::new();
    assert!(matches!(registry.sync_items("row", 3, build(3)), Ok(InitOutcome::Created)));
}

#[test]
fn teardown_reports_presence() {
    let mut registry = Registry::new();
    assert!(registry.init("row", 3, build(3)).is_ok());
    assert!(registry.teardown("row"));
    assert!(!registry.teardown("row"));
}

#[test]
fn iter_mut_visits_every_instance() {
    let mut registry = Registry::new();
    assert!(registry.init("a", 1, build(1)).is_ok());
    assert!(registry.init("b", 2, build(2)).is_ok());
    let mut total = 0;
    for (_, stub) in registry.iter_mut() {
        total += stub.item_count();
    }
    assert_eq!(total, 3);
}
