mod symphonia_inspector_test;
