//! To describe dump of decomposition results

use std::path::PathBuf;

/// which decomposition to run and dump
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Core,
    Truss,
    All,
}

impl Mode {
    pub fn with_cores(&self) -> bool { matches!(self, Mode::Core | Mode::All) }

    pub fn with_truss(&self) -> bool { matches!(self, Mode::Truss | Mode::All) }
}

impl std::str::FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s : &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "core"  => Ok(Mode::Core),
            "truss" => Ok(Mode::Truss),
            "all"   => Ok(Mode::All),
            _ => Err(anyhow::anyhow!("unknown mode {}, expecting core, truss or all", s)),
        }
    }
}


pub struct Output {
    /// decompositions asked for
    mode : Mode,
    /// prefix of output files
    output_name : String,
}

impl Output {
    /// if output_name is None, default output_name will be "decomposition"
    pub fn new(mode : Mode, output_name : &Option<String>) -> Self {
        let output_name = match output_name  {
            Some(name) => name.clone(),
            None => String::from("decomposition"),
        };
        Output{mode, output_name}
    }
    /// get mode
    pub fn get_mode(&self) -> Mode { self.mode}

    /// get output_name
    pub fn get_output_name(&self) -> &String { &self.output_name}

    /// file receiving core numbers
    pub fn get_cores_path(&self) -> PathBuf { PathBuf::from(format!("{}_cores.csv", self.output_name)) }

    /// file receiving truss numbers
    pub fn get_truss_path(&self) -> PathBuf { PathBuf::from(format!("{}_truss.csv", self.output_name)) }

}  // end of Output


impl Default for Output {
    fn default() -> Self {
        Output{mode : Mode::All, output_name : String::from("decomposition")}
    }
}

//=========================================================================

// end of mod tests
