//! Routes a component record to its calculator.

use tracing::{debug, trace};

use crate::milhdbk217f::attributes::Attributes;
use crate::milhdbk217f::error::{PredictionError, PredictionResult};
use crate::milhdbk217f::models::capacitor::CapacitorCalculator;
use crate::milhdbk217f::models::connection::ConnectionCalculator;
use crate::milhdbk217f::models::crystal::CrystalCalculator;
use crate::milhdbk217f::models::filter::FilterCalculator;
use crate::milhdbk217f::models::fuse::FuseCalculator;
use crate::milhdbk217f::models::inductor::InductorCalculator;
use crate::milhdbk217f::models::lamp::LampCalculator;
use crate::milhdbk217f::models::meter::MeterCalculator;
use crate::milhdbk217f::models::relay::RelayCalculator;
use crate::milhdbk217f::models::resistor::ResistorCalculator;
use crate::milhdbk217f::models::semiconductor::{DiodeCalculator, TransistorCalculator};
use crate::milhdbk217f::models::switch::SwitchCalculator;
use crate::milhdbk217f::models::ComponentCalculator;

static DIODE: DiodeCalculator = DiodeCalculator;
static TRANSISTOR: TransistorCalculator = TransistorCalculator;
static RESISTOR: ResistorCalculator = ResistorCalculator;
static CAPACITOR: CapacitorCalculator = CapacitorCalculator;
static INDUCTOR: InductorCalculator = InductorCalculator;
static RELAY: RelayCalculator = RelayCalculator::new();
static SWITCH: SwitchCalculator = SwitchCalculator::new();
static CONNECTION: ConnectionCalculator = ConnectionCalculator;
static METER: MeterCalculator = MeterCalculator::new();
static CRYSTAL: CrystalCalculator = CrystalCalculator;
static FILTER: FilterCalculator = FilterCalculator;
static FUSE: FuseCalculator = FuseCalculator;
static LAMP: LampCalculator = LampCalculator;

/// Returns the calculator for a category and subcategory.
///
/// # Errors
///
/// Returns [`PredictionError::UnsupportedCategory`] for a combination no
/// calculator handles.
pub fn calculator_for(category_id: u32, subcategory_id: u32) -> PredictionResult<&'static dyn ComponentCalculator> {
    let calculator: &'static dyn ComponentCalculator = match (category_id, subcategory_id) {
        (2, 1) => &DIODE,
        (2, 3 | 4 | 5 | 10) => &TRANSISTOR,
        (3, 1..=15) => &RESISTOR,
        (4, 1..=19) => &CAPACITOR,
        (5, 1 | 2) => &INDUCTOR,
        (6, 1 | 2) => &RELAY,
        (7, 1..=5) => &SWITCH,
        (8, 1..=5) => &CONNECTION,
        (9, 1 | 2) => &METER,
        (10, 1) => &CRYSTAL,
        (10, 2) => &FILTER,
        (10, 3) => &FUSE,
        (10, 4) => &LAMP,
        _ => {
            return Err(PredictionError::UnsupportedCategory {
                category_id,
                subcategory_id,
            })
        }
    };
    trace!(category_id, subcategory_id, calculator = calculator.name(), "dispatch");
    Ok(calculator)
}

/// Calculates the active and dormant hazard rates of a record.
///
/// # Errors
///
/// Returns an error if the category is unsupported, the method ID is
/// unknown, or a part stress selector misses its table.
pub fn calculate(attributes: &mut Attributes) -> PredictionResult<String> {
    calculator_for(attributes.category_id, attributes.subcategory_id)?.calculate(attributes)
}

/// Calculates the hazard rates of a record and then its derating verdict.
///
/// # Errors
///
/// Same as [`calculate`].
pub fn assess(attributes: &mut Attributes) -> PredictionResult<String> {
    let calculator = calculator_for(attributes.category_id, attributes.subcategory_id)?;
    let msg = calculator.calculate(attributes)?;
    calculator.overstressed(attributes);
    debug!(
        hardware_id = attributes.hardware_id,
        overstress = attributes.overstress,
        "assessed"
    );
    Ok(msg)
}

/// Replaces zero or unset stress inputs of a record with defaults.
///
/// # Errors
///
/// Returns [`PredictionError::UnsupportedCategory`] if the category is
/// unsupported.
pub fn set_default_values(attributes: &mut Attributes) -> PredictionResult<()> {
    calculator_for(attributes.category_id, attributes.subcategory_id)?.set_default_values(attributes);
    Ok(())
}
