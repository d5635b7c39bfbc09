mod loose_value;
mod media;
