//! Sensor and camera helper counters.

use metrics::counter;

/// A sensor refused a request (format, configuration, control, ...)
pub fn record_request_rejected(sensor_id: &str, operation: &'static str) {
    counter!(
        "camera_sensor_requests_rejected_total",
        "sensor_id" => sensor_id.to_string(),
        "operation" => operation
    )
    .increment(1);
}

/// A sensor accepted a full configuration
pub fn record_format_applied(sensor_id: &str) {
    counter!(
        "camera_sensor_configurations_applied_total",
        "sensor_id" => sensor_id.to_string()
    )
    .increment(1);
}

/// A camera helper was instantiated
pub fn record_helper_created(name: &str) {
    counter!(
        "camera_helpers_created_total",
        "helper" => name.to_string()
    )
    .increment(1);
}

/// A camera helper lookup named an unregistered sensor
pub fn record_helper_lookup_miss(name: &str) {
    counter!(
        "camera_helper_lookup_misses_total",
        "helper" => name.to_string()
    )
    .increment(1);
}
