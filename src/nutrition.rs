use serde::Serialize;

/// Energy and macronutrients. For food rows the values are per 100 units; for
/// eating rows they are absolute for the logged quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Macros {
    pub callories: f64,
    pub squirrels: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        callories: 0.0,
        squirrels: 0.0,
        fats: 0.0,
        carbohydrates: 0.0,
    };

    /// Scales per-100-unit values to `quantity` units.
    pub fn for_quantity(&self, quantity: f64) -> Macros {
        let scale = |per_100: f64| per_100 * quantity / 100.0;
        Macros {
            callories: scale(self.callories),
            squirrels: scale(self.squirrels),
            fats: scale(self.fats),
            carbohydrates: scale(self.carbohydrates),
        }
    }
}

/// Body mass index from weight in kilograms and height in centimetres.
/// `None` when the height is not positive.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if height_cm <= 0.0 {
        return None;
    }
    let meters = height_cm / 100.0;
    Some(weight_kg / (meters * meters))
}
