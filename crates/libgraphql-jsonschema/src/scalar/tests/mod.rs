mod scalar_registry_tests;
