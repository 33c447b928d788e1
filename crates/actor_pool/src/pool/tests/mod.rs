//! Scenario tests for the pool against a recording host and the bundled world

mod component_scenarios;
