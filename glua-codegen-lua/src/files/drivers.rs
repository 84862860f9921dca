use glua_core::GeneratedFile;

/// A runtime driver shim copied verbatim into the output.
#[derive(Debug, Clone, Copy)]
pub struct DriverShim {
    pub name: &'static str,
    pub source: &'static str,
}

/// Driver shims in emission order.
pub const DRIVERS: &[DriverShim] = &[
    DriverShim {
        name: "gmod",
        source: include_str!("../../assets/drivers/gmod.lua"),
    },
    DriverShim {
        name: "libsql",
        source: include_str!("../../assets/drivers/libsql.lua"),
    },
];

impl GeneratedFile for DriverShim {
    fn path(&self) -> String {
        format!("drivers/{}.lua", self.name)
    }

    fn render(&self) -> String {
        self.source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_paths() {
        let paths: Vec<String> = DRIVERS.iter().map(GeneratedFile::path).collect();
        assert_eq!(paths, ["drivers/gmod.lua", "drivers/libsql.lua"]);
    }

    #[test]
    fn test_drivers_implement_the_driver_interface() {
        for driver in DRIVERS {
            assert!(driver.render().contains("query"), "{}", driver.name);
            assert!(driver.render().contains("exec"), "{}", driver.name);
        }
    }
}
