mod authoring_steps;
mod persistence_steps;
mod quiz_taking_steps;
