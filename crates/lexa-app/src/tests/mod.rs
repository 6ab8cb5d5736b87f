mod controller_tests;
mod support;
