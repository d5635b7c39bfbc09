mod execute;
mod resources;
