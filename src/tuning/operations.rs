mod sys_tunables;

pub use sys_tunables::SysTunables;
