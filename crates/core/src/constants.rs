/// Label shown when a budget has no client assigned.
pub const UNASSIGNED_CLIENT_LABEL: &str = "Sin cliente";

/// Label shown when a budget has no vehicle assigned.
pub const UNASSIGNED_VEHICLE_LABEL: &str = "Sin vehículo";

/// Label shown for a line item whose product is missing from the catalog.
pub const UNKNOWN_PRODUCT_LABEL: &str = "Desconocido";

/// Fallback notification text when a server error carries no message.
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error";

/// Default number of rows per page in list views.
pub const DEFAULT_PAGE_SIZE: usize = 6;
