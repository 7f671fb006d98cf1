//! SPICE-backed ephemeris built on top of the CSPICE toolkit.
//!
//! Kernels listed in [`crate::kernels::KERNEL_CATALOG`] are loaded once per process.
//! Queries are heliocentric (`SUN` observer) in the `ECLIPJ2000` frame with no
//! aberration correction; only the x/y components are kept.

use std::ffi::{CStr, CString};
use std::sync::{Mutex, OnceLock};

use cspice_sys::{
    SpiceBoolean, SpiceDouble, SpiceInt, erract_c, failed_c, furnsh_c, getmsg_c, kclear_c,
    reset_c, spkezr_c,
};
use solar_core::planar::PlanarPosition;
use solar_core::units::km_to_au;
use tracing::{debug, trace};

use crate::bodies::{normalize_body_name, normalize_heliocentric_target_name};
use crate::kernels::{KERNEL_CATALOG, KernelDescriptor, validate_kernel_paths};
use crate::{EphemerisError, EphemerisProvider, Epoch};

const PROVIDER: &str = "spice";
const OBSERVER: &str = "SUN";
const FRAME: &str = "ECLIPJ2000";
const ABERRATION: &str = "NONE";

static INITIALIZED: OnceLock<()> = OnceLock::new();
static INITIALIZE_LOCK: Mutex<()> = Mutex::new(());

/// Ensure the CSPICE runtime has all required kernels loaded.
pub fn load_default_kernels() -> Result<(), EphemerisError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }
    let _lock = INITIALIZE_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if INITIALIZED.get().is_some() {
        return Ok(());
    }
    initialize_spice()?;
    let _ = INITIALIZED.set(());
    Ok(())
}

/// Ephemeris provider reading positions from the local SPICE kernels.
#[derive(Debug, Clone, Copy)]
pub struct SpiceEphemeris {
    _loaded: (),
}

impl SpiceEphemeris {
    /// Load the kernel set, failing early when a kernel is missing.
    pub fn load() -> Result<Self, EphemerisError> {
        load_default_kernels()?;
        debug!(kernels = KERNEL_CATALOG.len(), "SPICE kernels loaded");
        Ok(Self { _loaded: () })
    }
}

impl EphemerisProvider for SpiceEphemeris {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn position(&self, body: &str, epoch: &Epoch) -> Result<PlanarPosition, EphemerisError> {
        if normalize_body_name(body) == "sun" {
            return Ok(PlanarPosition::ORIGIN);
        }
        let target = normalize_heliocentric_target_name(body);
        let position_km = position_km(&target, epoch.et_seconds())?;
        let position = PlanarPosition::new(km_to_au(position_km[0]), km_to_au(position_km[1]));
        trace!(target, et = epoch.et_seconds(), x = position.x, y = position.y, "spice position");
        Ok(position)
    }
}

fn position_km(target: &str, ephemeris_time: SpiceDouble) -> Result<[f64; 3], EphemerisError> {
    let target_c = c_string(target)?;
    let observer_c = c_string(OBSERVER)?;
    let frame_c = c_string(FRAME)?;
    let aberration_c = c_string(ABERRATION)?;

    let mut state: [SpiceDouble; 6] = [0.0; 6];
    let mut light_time: SpiceDouble = 0.0;
    let _guard = INITIALIZE_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    unsafe {
        spkezr_c(
            target_c.as_ptr() as *mut i8,
            ephemeris_time,
            frame_c.as_ptr() as *mut i8,
            aberration_c.as_ptr() as *mut i8,
            observer_c.as_ptr() as *mut i8,
            state.as_mut_ptr(),
            &mut light_time,
        );
    }
    check_for_spice_error()?;
    Ok([state[0], state[1], state[2]])
}

fn c_string(value: &str) -> Result<CString, EphemerisError> {
    CString::new(value).map_err(|_| EphemerisError::Spice {
        message: format!("argument `{value}` contains an interior NUL byte"),
    })
}

fn initialize_spice() -> Result<(), EphemerisError> {
    validate_kernel_paths()?;
    unsafe {
        kclear_c();
    }
    configure_error_handling();
    for descriptor in KERNEL_CATALOG {
        let c_path = path_to_cstring(descriptor)?;
        unsafe {
            furnsh_c(c_path.as_ptr() as *mut i8);
        }
        check_for_spice_error()?;
    }
    Ok(())
}

fn path_to_cstring(descriptor: &KernelDescriptor) -> Result<CString, EphemerisError> {
    let path = descriptor.check()?;
    // `check` guarantees the path is UTF-8.
    let text = path.to_string_lossy().into_owned();
    CString::new(text).map_err(|_| EphemerisError::InvalidKernelPath {
        name: descriptor.filename,
        path,
    })
}

fn configure_error_handling() {
    const SET: &[u8] = b"SET\0";
    const RETURN_MODE: &[u8] = b"RETURN\0";
    unsafe {
        erract_c(
            SET.as_ptr() as *mut i8,
            0 as SpiceInt,
            RETURN_MODE.as_ptr() as *mut i8,
        );
    }
}

fn check_for_spice_error() -> Result<(), EphemerisError> {
    unsafe {
        if failed_c() != 0 as SpiceBoolean {
            const LONG: &[u8] = b"LONG\0";
            let mut buffer = vec![0i8; 1024];
            getmsg_c(
                LONG.as_ptr() as *mut i8,
                buffer.len() as SpiceInt,
                buffer.as_mut_ptr(),
            );
            reset_c();
            let message = CStr::from_ptr(buffer.as_ptr())
                .to_string_lossy()
                .trim()
                .to_string();
            return Err(EphemerisError::Spice { message });
        }
    }
    Ok(())
}
