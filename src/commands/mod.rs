pub mod chart;
pub mod serve;
pub mod table;
pub mod widgets;
