mod property_rewrite;
