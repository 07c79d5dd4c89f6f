pub(crate) mod support;

mod scenario_test;
