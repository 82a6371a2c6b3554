mod checked;
mod support;
