//! Server startup tests

mod startup_test;
