mod symphonia_inspector;

pub use symphonia_inspector::SymphoniaInspector;
