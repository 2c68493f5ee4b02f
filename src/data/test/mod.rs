mod shutdown;
mod sticky_message;
