mod controls;
mod errors;
mod linearity;
mod mesh;
mod project;
mod rates;
