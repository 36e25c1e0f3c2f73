mod lists;
mod panels;
