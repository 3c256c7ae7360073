pub mod put_record;
