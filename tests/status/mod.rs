mod list_staged_files_in_staging_order;
