mod acls;
mod topics;
