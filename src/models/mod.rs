pub(crate) mod sensor;

pub(crate) use sensor::SensorReading;
