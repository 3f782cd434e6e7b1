mod setup_tests;
mod test_utils;
