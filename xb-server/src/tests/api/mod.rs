mod registry_validation;
