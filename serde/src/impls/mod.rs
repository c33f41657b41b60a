mod array;
mod bool;
mod boxed;
mod float;
mod integer;
mod option;
mod string;
mod unit;
mod vector;
