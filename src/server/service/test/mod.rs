mod class;
