mod acls;
mod brokers;
mod groups;
mod partitions;
mod topics;
