mod parser_error_tests;
mod property_tests;
mod utils;
