// Application Constants
// Compile-time defaults generated by build.rs from src/config.yaml

include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
