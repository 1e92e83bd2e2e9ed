//! C-facing adapter for the qth geodesy and grid locator crates.

use std::ffi::{CStr, c_char};

use qth_geodesy::GeodesyError;
use qth_grid::{LocatorError, MAX_LOCATOR_LEN};
use qth_math::{CoordError, Coordinate, ErrorKind};

/// ABI version for downstream bindings.
pub const QTH_API_VERSION: u32 = 1;

/// Buffer size that fits any locator plus its NUL terminator.
pub const QTH_LOCATOR_CAPACITY: usize = MAX_LOCATOR_LEN + 1;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QthStatus {
    Ok = 0,
    InvalidArgument = 1,
    NoConvergence = 2,
    NullPointer = 3,
    BufferTooSmall = 4,
    Internal = 255,
}

impl From<ErrorKind> for QthStatus {
    fn from(value: ErrorKind) -> Self {
        match value {
            ErrorKind::InvalidArgument => Self::InvalidArgument,
            ErrorKind::NumericNonConvergence => Self::NoConvergence,
        }
    }
}

impl From<&CoordError> for QthStatus {
    fn from(value: &CoordError) -> Self {
        value.kind().into()
    }
}

impl From<&GeodesyError> for QthStatus {
    fn from(value: &GeodesyError) -> Self {
        value.kind().into()
    }
}

impl From<&LocatorError> for QthStatus {
    fn from(value: &LocatorError) -> Self {
        value.kind().into()
    }
}

/// C-compatible coordinate in decimal degrees.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QthCoordinate {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl From<QthCoordinate> for Coordinate {
    fn from(value: QthCoordinate) -> Self {
        Coordinate::new(value.latitude_deg, value.longitude_deg)
    }
}

impl From<Coordinate> for QthCoordinate {
    fn from(value: Coordinate) -> Self {
        Self {
            latitude_deg: value.latitude_deg,
            longitude_deg: value.longitude_deg,
        }
    }
}

/// Validate both endpoints of a C-side query.
fn validated_pair(
    from: QthCoordinate,
    to: QthCoordinate,
) -> Result<(Coordinate, Coordinate), QthStatus> {
    let from = Coordinate::try_new(from.latitude_deg, from.longitude_deg)
        .map_err(|err| QthStatus::from(&err))?;
    let to = Coordinate::try_new(to.latitude_deg, to.longitude_deg)
        .map_err(|err| QthStatus::from(&err))?;
    Ok((from, to))
}

/// Haversine distance using C-compatible types.
pub fn qth_haversine_km_internal(
    from: QthCoordinate,
    to: QthCoordinate,
) -> Result<f64, QthStatus> {
    let (from, to) = validated_pair(from, to)?;
    Ok(qth_geodesy::haversine_distance_km(from, to))
}

/// Vincenty distance on WGS-84 using C-compatible types.
pub fn qth_vincenty_km_internal(
    from: QthCoordinate,
    to: QthCoordinate,
) -> Result<f64, QthStatus> {
    qth_geodesy::ellipsoidal_distance_km(from.into(), to.into())
        .map_err(|err| QthStatus::from(&err))
}

/// Initial bearing using C-compatible types.
pub fn qth_initial_bearing_deg_internal(
    from: QthCoordinate,
    to: QthCoordinate,
) -> Result<f64, QthStatus> {
    let (from, to) = validated_pair(from, to)?;
    Ok(qth_geodesy::initial_bearing_deg(from, to))
}

/// Encode a `[latitude, longitude]` slice as a locator.
pub fn qth_locator_encode_internal(coords: &[f64], precision: u8) -> Result<String, QthStatus> {
    let coord = Coordinate::try_from(coords).map_err(|err| QthStatus::from(&err))?;
    qth_grid::encode_locator(coord, precision).map_err(|err| QthStatus::from(&err))
}

/// Decode locator bytes (without the NUL terminator) to the cell center.
pub fn qth_locator_decode_internal(locator_utf8: &[u8]) -> Result<QthCoordinate, QthStatus> {
    qth_grid::decode_locator_bytes(locator_utf8)
        .map(QthCoordinate::from)
        .map_err(|err| QthStatus::from(&err))
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn qth_api_version() -> u32 {
    QTH_API_VERSION
}

/// Great-circle (Haversine) distance in km on the mean-radius sphere.
///
/// Non-finite values and latitudes outside [-90, 90] return
/// [`QthStatus::InvalidArgument`] and leave `out_km` untouched.
///
/// # Safety
/// `from`, `to`, and `out_km` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qth_haversine_km(
    from: *const QthCoordinate,
    to: *const QthCoordinate,
    out_km: *mut f64,
) -> QthStatus {
    ffi_boundary(|| {
        if from.is_null() || to.is_null() || out_km.is_null() {
            return QthStatus::NullPointer;
        }

        // SAFETY: Pointers are checked for null and copied by value.
        let (from, to) = unsafe { (*from, *to) };

        match qth_haversine_km_internal(from, to) {
            Ok(km) => {
                // SAFETY: Pointer is checked for null; write one value.
                unsafe { *out_km = km };
                QthStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Ellipsoidal (Vincenty, WGS-84) distance in km.
///
/// Returns [`QthStatus::NoConvergence`] for nearly antipodal points and
/// leaves `out_km` untouched.
///
/// # Safety
/// `from`, `to`, and `out_km` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qth_vincenty_km(
    from: *const QthCoordinate,
    to: *const QthCoordinate,
    out_km: *mut f64,
) -> QthStatus {
    ffi_boundary(|| {
        if from.is_null() || to.is_null() || out_km.is_null() {
            return QthStatus::NullPointer;
        }

        // SAFETY: Pointers are checked for null and copied by value.
        let (from, to) = unsafe { (*from, *to) };

        match qth_vincenty_km_internal(from, to) {
            Ok(km) => {
                // SAFETY: Pointer is checked for null; write one value.
                unsafe { *out_km = km };
                QthStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Initial great-circle bearing in degrees, [0, 360).
///
/// # Safety
/// `from`, `to`, and `out_deg` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qth_initial_bearing_deg(
    from: *const QthCoordinate,
    to: *const QthCoordinate,
    out_deg: *mut f64,
) -> QthStatus {
    ffi_boundary(|| {
        if from.is_null() || to.is_null() || out_deg.is_null() {
            return QthStatus::NullPointer;
        }

        // SAFETY: Pointers are checked for null and copied by value.
        let (from, to) = unsafe { (*from, *to) };

        match qth_initial_bearing_deg_internal(from, to) {
            Ok(deg) => {
                // SAFETY: Pointer is checked for null; write one value.
                unsafe { *out_deg = deg };
                QthStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Encode `[latitude, longitude]` as a NUL-terminated upper-case locator.
///
/// `coord_count` must be 2, otherwise [`QthStatus::InvalidArgument`].
/// `out_capacity` must hold `2 * precision + 1` bytes, otherwise
/// [`QthStatus::BufferTooSmall`]; [`QTH_LOCATOR_CAPACITY`] always suffices.
///
/// # Safety
/// `coords` must point to `coord_count` contiguous f64 values.
/// `out_utf8` must be valid for writes of `out_capacity` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qth_locator_encode(
    coords: *const f64,
    coord_count: usize,
    precision: u8,
    out_utf8: *mut u8,
    out_capacity: usize,
) -> QthStatus {
    ffi_boundary(|| {
        if coords.is_null() || out_utf8.is_null() {
            return QthStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null; caller guarantees `coord_count` values.
        let values = unsafe { std::slice::from_raw_parts(coords, coord_count) };

        let locator = match qth_locator_encode_internal(values, precision) {
            Ok(locator) => locator,
            Err(status) => return status,
        };
        let bytes = locator.as_bytes();
        if bytes.len() >= out_capacity {
            return QthStatus::BufferTooSmall;
        }

        // SAFETY: Pointer is checked for null; caller guarantees `out_capacity`
        // writable bytes and `bytes.len() + 1 <= out_capacity`.
        let out = unsafe { std::slice::from_raw_parts_mut(out_utf8, out_capacity) };
        out[..bytes.len()].copy_from_slice(bytes);
        out[bytes.len()] = 0;
        QthStatus::Ok
    })
}

/// Decode a NUL-terminated locator to the center of its cell.
///
/// Non-UTF-8 input and malformed locators return
/// [`QthStatus::InvalidArgument`].
///
/// # Safety
/// `locator_utf8` must be a valid, non-null, NUL-terminated C string.
/// `out_coord` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qth_locator_decode(
    locator_utf8: *const u8,
    out_coord: *mut QthCoordinate,
) -> QthStatus {
    ffi_boundary(|| {
        if locator_utf8.is_null() || out_coord.is_null() {
            return QthStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null; read until NUL byte.
        let c_str = unsafe { CStr::from_ptr(locator_utf8.cast::<c_char>()) };

        match qth_locator_decode_internal(c_str.to_bytes()) {
            Ok(coord) => {
                // SAFETY: Pointer is checked for null; write one struct.
                unsafe { *out_coord = coord };
                QthStatus::Ok
            }
            Err(status) => status,
        }
    })
}

fn ffi_boundary(f: impl FnOnce() -> QthStatus) -> QthStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => QthStatus::Internal,
    }
}
