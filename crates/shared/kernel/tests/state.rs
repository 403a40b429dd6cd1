use agk_domain::config::ApiConfig;
use agk_domain::registry::{FeatureSlice, InitializedSlice};
use agk_kernel::server::{ApiState, ApiStateError};
use std::any::Any;

#[derive(Debug)]
struct Demo {
    label: &'static str,
}

impl FeatureSlice for Demo {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug)]
struct Unregistered;

impl FeatureSlice for Unregistered {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(matches!(err, ApiStateError::Validation { .. }));
}

#[test]
fn registered_slice_is_retrievable() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slice(InitializedSlice::new(Demo { label: "demo" }))
        .build()
        .expect("state builds");

    let demo = state.try_get_slice::<Demo>().expect("slice registered");
    assert_eq!(demo.label, "demo");
    assert_eq!(state.slice_ids().count(), 1);
}

#[test]
fn missing_slice_is_an_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state builds");

    assert!(state.get_slice::<Unregistered>().is_none());
    let err = state.try_get_slice::<Unregistered>().expect_err("slice absent");
    assert!(matches!(err, ApiStateError::MissingSlice { .. }));
}

#[test]
fn registering_same_slice_twice_keeps_last() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .register_slices([
            InitializedSlice::new(Demo { label: "first" }),
            InitializedSlice::new(Demo { label: "second" }),
        ])
        .build()
        .expect("state builds");

    assert_eq!(state.try_get_slice::<Demo>().expect("slice registered").label, "second");
    assert_eq!(state.slice_ids().count(), 1);
}
