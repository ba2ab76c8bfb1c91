mod cv_tests;
