mod direction_tests;
