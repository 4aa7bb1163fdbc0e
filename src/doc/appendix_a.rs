/*!
# Error Messages

A program stops at the first error. Anything it has already done, such
as starting the motors, stays done. The message gives the byte offset in
program memory where the error was found and the `ubasic` command shows
the line.

<pre><code>&nbsp;SYNTAX ERROR AT 14; EXPECTED LEFT BRACE
&nbsp;   2 | if a > 3 print a
</code></pre>

## SYNTAX ERROR
The program does not follow the grammar. The message says what was expected.

## BREAK
The program was stopped.

## OVERFLOW
A number is larger than 32767.

## OUT OF MEMORY
The program does not fit in 511 bytes after squeezing.

## DIVISION BY ZERO
The right side of `/` or `%` was zero.

## LINE BUFFER OVERFLOW
A source line is longer than 80 characters.

## MISSING CLOSING BRACE
The program ended inside a block.

## UNEXPECTED CLOSING BRACE
A `}` does not close any block.

## BAD STORE NUMBER
Stores are numbered 0 to 3.

## FILE NOT FOUND
The store or file has nothing in it.

## DISK I/O ERROR
A store could not be written, or its checksum does not match.

## INTERNAL ERROR
Something else went wrong, such as a failed PC link handshake.
*/
