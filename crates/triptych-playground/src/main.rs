//! Composition root demo.
//!
//! Builds (shape, driver, system) triples, renders them, then rebinds layers
//! at runtime to show that each axis varies independently.

use anyhow::Result;

use triptych_engine::driver::{DirectX, OpenGl, Vulkan};
use triptych_engine::logging::{LoggingConfig, init_logging};
use triptych_engine::platform::{Linux, MacOs, Windows};
use triptych_engine::scene::{Line, Polygon, Shape};

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        env_filter: Some("info,triptych_engine=debug".into()),
        ..LoggingConfig::default()
    });

    let mut line = Line::new(
        Box::new(OpenGl::new(Box::new(Linux::new()))),
        0.0,
        0.0,
        10.0,
        10.0,
    );
    log::info!("{}", line.config_string());
    line.render()?;

    let mut polygon = Polygon::new(Box::new(DirectX::new(Box::new(Windows::new()))), 6);
    log::info!("{}", polygon.config_string());
    polygon.render()?;

    // Same polygon, new backend: the rebind leaves the geometry untouched.
    polygon.set_driver(Box::new(Vulkan::new(Box::new(MacOs::new()))));
    log::info!("{}", polygon.config_string());
    polygon.render()?;

    // Sinks can also be swapped beneath an existing driver.
    polygon.driver_mut().set_system(Box::new(Linux::new()));
    polygon.render()?;

    Ok(())
}
