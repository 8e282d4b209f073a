//! Factory method: the creator trait defers the choice of product to its implementors.

use tracing::debug;

pub trait Transport: Send + Sync {
    fn deliver(&self, cargo: &str) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Truck;

impl Transport for Truck {
    fn deliver(&self, cargo: &str) -> String {
        format!("Delivering {} by land in a truck", cargo)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ship;

impl Transport for Ship {
    fn deliver(&self, cargo: &str) -> String {
        format!("Delivering {} by sea in a container ship", cargo)
    }
}

/// Creator with a factory method.
///
/// `plan_delivery` is written once against [`Transport`]; each implementor only
/// decides which transport [`Logistics::create_transport`] returns.
pub trait Logistics {
    fn create_transport(&self) -> Box<dyn Transport>;

    fn plan_delivery(&self, cargo: &str) -> String {
        debug!(cargo, "Planning delivery");
        self.create_transport().deliver(cargo)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoadLogistics;

impl Logistics for RoadLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Truck)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SeaLogistics;

impl Logistics for SeaLogistics {
    fn create_transport(&self) -> Box<dyn Transport> {
        Box::new(Ship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_creator_picks_its_transport() {
        assert_eq!(
            RoadLogistics.plan_delivery("tea"),
            "Delivering tea by land in a truck"
        );
        assert_eq!(
            SeaLogistics.plan_delivery("rubber"),
            "Delivering rubber by sea in a container ship"
        );
    }
}
