mod owner;
mod pet;
