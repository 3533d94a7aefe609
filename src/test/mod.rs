mod event_order;
mod event_queue;
mod sim_time;
