mod db;
mod users;
