mod actuator_service;

pub use actuator_service::ActuatorService;
