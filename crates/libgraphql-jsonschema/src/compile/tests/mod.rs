mod nullable_tests;
